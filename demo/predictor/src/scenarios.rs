// Reference scenarios for the rule set

use crate::render;
use anyhow::Result;
use colored::Colorize;
use risk_engine::{FormField, Notification, Predictor, TransactionForm};

struct Scenario {
    name: &'static str,
    fields: [(FormField, &'static str); 4],
}

static SCENARIOS: [Scenario; 6] = [
    Scenario {
        name: "Everyday payment",
        fields: [
            (FormField::Type, "PAYMENT"),
            (FormField::Amount, "500"),
            (FormField::OriginOldBalance, "1000"),
            (FormField::OriginNewBalance, "500"),
        ],
    },
    Scenario {
        name: "Large round transfer that drains the account",
        fields: [
            (FormField::Type, "TRANSFER"),
            (FormField::Amount, "150000"),
            (FormField::OriginOldBalance, "150000"),
            (FormField::OriginNewBalance, "0"),
        ],
    },
    Scenario {
        name: "Large transfer right at the threshold",
        fields: [
            (FormField::Type, "TRANSFER"),
            (FormField::Amount, "150001"),
            (FormField::OriginOldBalance, "150001"),
            (FormField::OriginNewBalance, "0"),
        ],
    },
    Scenario {
        name: "Empty cash-out",
        fields: [
            (FormField::Type, "CASH_OUT"),
            (FormField::Amount, "0"),
            (FormField::OriginOldBalance, "0"),
            (FormField::OriginNewBalance, "0"),
        ],
    },
    Scenario {
        name: "Transfer out of an empty account",
        fields: [
            (FormField::Type, "TRANSFER"),
            (FormField::Amount, "200000"),
            (FormField::OriginOldBalance, "0"),
            (FormField::OriginNewBalance, "0"),
        ],
    },
    Scenario {
        name: "Form submitted without an amount",
        fields: [
            (FormField::Type, "CASH_OUT"),
            (FormField::Amount, ""),
            (FormField::OriginOldBalance, "1000"),
            (FormField::OriginNewBalance, "0"),
        ],
    },
];

pub async fn run_all(predictor: &Predictor) -> Result<()> {
    println!("\n🚀 =================================================================");
    println!("🚀 FraudScope - Reference Scenarios");
    println!("🚀 =================================================================");

    for (idx, scenario) in SCENARIOS.iter().enumerate() {
        println!(
            "\n💳 Scenario {}/{}: {}",
            idx + 1,
            SCENARIOS.len(),
            scenario.name.bold()
        );

        let form = scenario
            .fields
            .iter()
            .fold(TransactionForm::new(), |form, (field, value)| {
                form.with(*field, *value)
            });
        for (field, value) in &scenario.fields {
            println!("   {:<20} {}", field.label(), if value.is_empty() { "-" } else { *value });
        }

        match predictor.predict(&form).await {
            Ok(prediction) => {
                render::notification(&prediction.notification);
                render::assessment(&prediction.assessment);
            }
            Err(e) => render::notification(&Notification::from_error(&e)),
        }
    }

    Ok(())
}
