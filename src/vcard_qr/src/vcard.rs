use crate::{
    constants::{ADDRESS_PLACEHOLDER, LINE_ENDING, ORGANIZATION_PLACEHOLDER, VCARD_VERSION},
    contact::ContactRecord,
};

/// Serialize a contact into a vCard 3.0 record.
///
/// Always emits the same 13 CRLF-terminated lines in a fixed order; empty
/// fields produce empty values rather than missing lines. `ORG` and `ADR`
/// carry fixed placeholders and the work and fax numbers are always empty.
///
/// Known limitation: field values are not escaped. A `;`, `,` or `\` inside a
/// value is written verbatim, and a value containing a line break splits the
/// record. Callers that need RFC 6350 escaping must add it explicitly.
pub fn encode(contact: &ContactRecord) -> String {
    let lines = [
        "BEGIN:VCARD".to_owned(),
        format!("VERSION:{VCARD_VERSION}"),
        format!("N:{};{}", contact.last_name, contact.first_name),
        format!("FN:{}", contact.full_name),
        format!("ORG:{ORGANIZATION_PLACEHOLDER}"),
        format!("TITLE:{}", contact.role),
        format!("ADR:;;{ADDRESS_PLACEHOLDER}"),
        "TEL;WORK;VOICE:".to_owned(),
        format!("TEL;CELL:{}", contact.phone),
        "TEL;FAX:".to_owned(),
        format!("EMAIL;WORK;INTERNET:{}", contact.email),
        format!("URL:{}", contact.website),
        "END:VCARD".to_owned(),
    ];

    let mut vcard = String::with_capacity(lines.iter().map(|l| l.len() + 2).sum());
    for line in &lines {
        vcard.push_str(line);
        vcard.push_str(LINE_ENDING);
    }
    vcard
}
