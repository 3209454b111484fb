//! Prebuilt Tally requests.
//!
//! Each function returns an [`Envelope`] ready to be rendered and posted.

use tallyai_types::tally::{yes_no, TallyRequestType};

use super::envelope::{Envelope, TdlObject};

/// Name of the report that yields the currently loaded company.
pub const CURRENT_COMPANY_REPORT: &str = "GetCurrentCompanyNameReport";

/// Name of the currently loaded company.
///
/// Defines a one-field report over `##SVCURRENTCOMPANY`, exported as
/// `<COMPANY><NAME>...</NAME></COMPANY>`.
pub fn current_company() -> Envelope {
    Envelope::export(TallyRequestType::Data, CURRENT_COMPANY_REPORT)
        .xml_format()
        .tdl(TdlObject::report(CURRENT_COMPANY_REPORT).property("FORMS", "CompanyNameForm"))
        .tdl(
            TdlObject::form("CompanyNameForm")
                .property("TOPPARTS", "CompanyNamePart")
                .property("XMLTAG", "COMPANY"),
        )
        .tdl(
            TdlObject::part("CompanyNamePart")
                .property("TOPLINES", "CompanyNameLine")
                .property("SCROLLED", "Vertical"),
        )
        .tdl(TdlObject::line("CompanyNameLine").property("LEFTFIELDS", "CompanyNameField"))
        .tdl(
            TdlObject::field("CompanyNameField")
                .property("SET", "##SVCURRENTCOMPANY")
                .property("XMLTAG", "NAME"),
        )
}

/// All sales vouchers for the current period (built-in collection).
pub fn sales_vouchers() -> Envelope {
    Envelope::export(TallyRequestType::Collection, "Sales Vouchers").xml_format()
}

/// Companies known to the server.
pub fn companies(include_simple_companies: bool) -> Envelope {
    Envelope::export(TallyRequestType::Collection, "List of Companies")
        .static_variable("SVIsSimpleCompany", yes_no(include_simple_companies))
        .tdl(
            TdlObject::collection("List of Companies")
                .initialize(true)
                .property("TYPE", "Company")
                .property("NATIVEMETHOD", "Name"),
        )
}

/// Ledgers of the given company, or of the loaded company when `None`.
pub fn ledgers(company: Option<&str>) -> Envelope {
    let mut envelope = Envelope::export(TallyRequestType::Collection, "Ledgers").xml_format();
    if let Some(company) = company {
        envelope = envelope.static_variable("SVCURRENTCOMPANY", company);
    }
    envelope.tdl(
        TdlObject::collection("Ledgers")
            .property("TYPE", "Ledger")
            .property("NATIVEMETHOD", "Address")
            .property("NATIVEMETHOD", "Masterid")
            .property("NATIVEMETHOD", "*"),
    )
}

/// Stock items with their master id and GUID.
pub fn stock_items() -> Envelope {
    Envelope::export(TallyRequestType::Collection, "Custom List of StockItems").tdl(
        TdlObject::collection("Custom List of StockItems")
            .initialize(true)
            .property("TYPE", "StockItem")
            .property("NATIVEMETHOD", "MasterID")
            .property("NATIVEMETHOD", "GUID"),
    )
}

/// Call a TDL function loaded on the server.
pub fn tdl_function<I, S>(name: &str, params: I) -> Envelope
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    params
        .into_iter()
        .fold(Envelope::execute(name), |envelope, param| envelope.param(param))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tallyai_types::tally::TallyRequestKind;

    #[test]
    fn current_company_defines_full_report_chain() {
        let xml = current_company().to_xml().unwrap();
        assert!(xml.contains("<TYPE>Data</TYPE>"));
        assert!(xml.contains("<ID>GetCurrentCompanyNameReport</ID>"));
        assert!(xml.contains("<SVEXPORTFORMAT>$$SysName:XML</SVEXPORTFORMAT>"));
        for tag in ["<REPORT ", "<FORM ", "<PART ", "<LINE ", "<FIELD "] {
            assert!(xml.contains(tag), "missing {tag}");
        }
        assert!(xml.contains("<SET>##SVCURRENTCOMPANY</SET>"));
        assert!(xml.contains("<SCROLLED>Vertical</SCROLLED>"));
    }

    #[test]
    fn sales_vouchers_uses_builtin_collection() {
        let envelope = sales_vouchers();
        assert_eq!(envelope.request_type(), TallyRequestType::Collection);
        let xml = envelope.to_xml().unwrap();
        assert!(xml.contains("<ID>Sales Vouchers</ID>"));
        assert!(!xml.contains("<TDL>"));
    }

    #[test]
    fn companies_simple_flag() {
        let without = companies(false).to_xml().unwrap();
        assert!(without.contains("<SVIsSimpleCompany>No</SVIsSimpleCompany>"));
        assert!(!without.contains("SVEXPORTFORMAT"));

        let with = companies(true).to_xml().unwrap();
        assert!(with.contains("<SVIsSimpleCompany>Yes</SVIsSimpleCompany>"));
        assert!(with.contains(r#"ISINITIALIZE="Yes""#));
    }

    #[test]
    fn ledgers_company_is_optional() {
        let all = ledgers(None).to_xml().unwrap();
        assert!(!all.contains("SVCURRENTCOMPANY"));

        let scoped = ledgers(Some("Acme Traders")).to_xml().unwrap();
        assert!(scoped.contains("<SVCURRENTCOMPANY>Acme Traders</SVCURRENTCOMPANY>"));
        assert_eq!(scoped.matches("<NATIVEMETHOD>").count(), 3);
        assert!(scoped.contains("<NATIVEMETHOD>*</NATIVEMETHOD>"));
    }

    #[test]
    fn stock_items_has_no_static_variables() {
        let xml = stock_items().to_xml().unwrap();
        assert!(xml.contains("<STATICVARIABLES />"));
        assert!(xml.contains("<TYPE>StockItem</TYPE>"));
    }

    #[test]
    fn tdl_function_carries_params() {
        let envelope = tdl_function("SimpleAdd", ["10", "20"]);
        assert_eq!(envelope.kind(), TallyRequestKind::Execute);
        assert_eq!(envelope.id(), "SimpleAdd");
        let xml = envelope.to_xml().unwrap();
        assert_eq!(xml.matches("<PARAM>").count(), 2);
    }
}
