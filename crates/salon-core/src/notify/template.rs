//! HTML email templates for lead notifications.
//!
//! All submitted values are HTML-escaped before they are embedded.

use super::form::{ContactForm, LeadForm, SellCarForm};
use crate::config::{AppConfig, MailConfig};
use crate::sanitize::escape_html;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; }
        .header { background-color: #0c1117; color: #d97706; padding: 20px; text-align: center; }
        .content { background-color: #f5f5f5; padding: 20px; margin-top: 20px; }
        .section { background-color: white; padding: 15px; margin-bottom: 20px; border-left: 4px solid #d97706; }
        .field { margin-bottom: 10px; }
        .label { font-weight: bold; color: #0c1117; }
        .value { margin-left: 10px; }
        .footer { text-align: center; margin-top: 20px; font-size: 12px; color: #666; }
        h3 { color: #d97706; margin-bottom: 15px; }
"#;

/// Current local time in the notification timestamp format.
pub fn timestamp_now() -> String {
    chrono::Local::now()
        .format(MailConfig::TIMESTAMP_FORMAT)
        .to_string()
}

/// Email subject line for a lead.
pub fn subject_line(lead: &LeadForm) -> String {
    match lead {
        LeadForm::Contact(form) => format!("Neue Kontaktanfrage: {}", form.subject),
        LeadForm::SellCar(form) => format!(
            "Auto-Verkaufsanfrage: {} {} ({})",
            form.brand, form.model, form.year
        ),
    }
}

/// Render the HTML body for a lead.
pub fn render_html(lead: &LeadForm, timestamp: &str) -> String {
    match lead {
        LeadForm::Contact(form) => contact_html(form, timestamp),
        LeadForm::SellCar(form) => sell_car_html(form, timestamp),
    }
}

/// Human-readable label for a contact subject code.
pub fn subject_label(code: &str) -> &str {
    match code {
        "fahrzeug-interesse" => "Interesse an einem Fahrzeug",
        "beratung" => "Allgemeine Beratung",
        "finanzierung" => "Finanzierung",
        "service" => "Service & Wartung",
        "sonstiges" => "Sonstiges",
        other => other,
    }
}

/// Human-readable label for a vehicle condition code.
pub fn condition_label(code: &str) -> &str {
    match code {
        "sehr-gut" => "Sehr gut",
        "gut" => "Gut",
        "befriedigend" => "Befriedigend",
        "reparaturbedürftig" | "reparaturbeduerftig" => "Reparaturbedürftig",
        other => other,
    }
}

fn field(label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><span class="label">{}:</span><span class="value">{}</span></div>"#,
        label, value
    )
}

fn mailto(email: &str) -> String {
    let email = escape_html(email);
    format!(r#"<a href="mailto:{0}">{0}</a>"#, email)
}

fn page(title: &str, body: &str, footer: &[&str]) -> String {
    let footer: String = footer.iter().map(|line| format!("<p>{}</p>", line)).collect();
    format!(
        r#"<html>
<head>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{title}</h1>
            <p>{app}</p>
        </div>
        <div class="content">
{body}
        </div>
        <div class="footer">{footer}</div>
    </div>
</body>
</html>
"#,
        style = STYLE,
        title = title,
        app = AppConfig::APP_NAME,
        body = body,
        footer = footer,
    )
}

fn contact_html(form: &ContactForm, timestamp: &str) -> String {
    let mut body = vec![
        field("Datum/Zeit", timestamp),
        field("Name", &escape_html(&form.name)),
        field("E-Mail", &mailto(&form.email)),
    ];
    if let Some(phone) = &form.phone {
        body.push(field("Telefon", &escape_html(phone)));
    }
    body.push(field(
        "Betreff",
        &escape_html(subject_label(&form.subject)),
    ));
    body.push(format!(
        r#"<div class="section"><h3>Nachricht:</h3><p>{}</p></div>"#,
        escape_html(&form.message).replace('\n', "<br>")
    ));

    let generated = format!(
        "Diese E-Mail wurde automatisch vom Kontaktformular auf {} generiert.",
        AppConfig::SITE_DOMAIN
    );
    page(
        "Neue Kontaktanfrage",
        &body.join("\n"),
        &[
            generated.as_str(),
            "Bitte antworten Sie direkt an die angegebene E-Mail-Adresse des Kunden.",
        ],
    )
}

fn sell_car_html(form: &SellCarForm, timestamp: &str) -> String {
    let price = match form.price {
        Some(price) => format!("CHF {}.-", price),
        None => "Nicht angegeben".to_string(),
    };

    let vehicle = [
        field("Marke", &escape_html(&form.brand)),
        field("Modell", &escape_html(&form.model)),
        field("Baujahr", &form.year.to_string()),
        field("Kilometerstand", &format!("{} km", form.mileage)),
        field("Gewünschter Preis", &price),
        field("Zustand", &escape_html(condition_label(&form.condition))),
    ]
    .join("\n");
    let contact = [
        field("Name", &escape_html(&form.name)),
        field("E-Mail", &mailto(&form.email)),
    ]
    .join("\n");

    let body = format!(
        r#"{}
<div class="section"><h3>Fahrzeugdaten</h3>
{}
</div>
<div class="section"><h3>Kontaktdaten</h3>
{}
</div>"#,
        field("Datum/Zeit", timestamp),
        vehicle,
        contact
    );

    let generated = format!(
        "Diese Anfrage wurde über das Auto-Verkaufsformular auf {} gesendet.",
        AppConfig::SITE_DOMAIN
    );
    page(
        "Auto-Verkaufsanfrage",
        &body,
        &[
            generated.as_str(),
            "Bitte kontaktieren Sie den Kunden innerhalb von 24 Stunden.",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Anna <Muster>".into(),
            email: "anna@example.ch".into(),
            phone: Some("044 000 00 00".into()),
            subject: "finanzierung".into(),
            message: "Zeile 1\nZeile 2".into(),
        }
    }

    fn sell_car() -> SellCarForm {
        SellCarForm {
            brand: "Audi".into(),
            model: "A4".into(),
            year: 2019,
            mileage: 80000,
            price: None,
            condition: "reparaturbedürftig".into(),
            name: "Peter".into(),
            email: "peter@example.ch".into(),
        }
    }

    #[test]
    fn test_subject_lines() {
        assert_eq!(
            subject_line(&LeadForm::Contact(contact())),
            "Neue Kontaktanfrage: finanzierung"
        );
        assert_eq!(
            subject_line(&LeadForm::SellCar(sell_car())),
            "Auto-Verkaufsanfrage: Audi A4 (2019)"
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(subject_label("beratung"), "Allgemeine Beratung");
        assert_eq!(subject_label("custom"), "custom");
        assert_eq!(condition_label("sehr-gut"), "Sehr gut");
        assert_eq!(condition_label("reparaturbeduerftig"), "Reparaturbedürftig");
        assert_eq!(condition_label("neuwertig"), "neuwertig");
    }

    #[test]
    fn test_contact_html() {
        let html = render_html(&LeadForm::Contact(contact()), "01.02.2026 10:00:00");
        assert!(html.contains("01.02.2026 10:00:00"));
        assert!(html.contains("Anna &lt;Muster&gt;"));
        assert!(!html.contains("<Muster>"));
        assert!(html.contains(r#"<a href="mailto:anna@example.ch">anna@example.ch</a>"#));
        assert!(html.contains("044 000 00 00"));
        assert!(html.contains("Finanzierung"));
        assert!(html.contains("Zeile 1<br>Zeile 2"));
    }

    #[test]
    fn test_contact_html_without_phone() {
        let mut form = contact();
        form.phone = None;
        let html = render_html(&LeadForm::Contact(form), "x");
        assert!(!html.contains("Telefon"));
    }

    #[test]
    fn test_sell_car_html() {
        let html = render_html(&LeadForm::SellCar(sell_car()), "x");
        assert!(html.contains("Nicht angegeben"));
        assert!(html.contains("80000 km"));
        assert!(html.contains("Reparaturbedürftig"));

        let mut form = sell_car();
        form.price = Some(15000);
        let html = render_html(&LeadForm::SellCar(form), "x");
        assert!(html.contains("CHF 15000.-"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[2..3], ".");
        assert_eq!(&ts[10..11], " ");
    }
}
