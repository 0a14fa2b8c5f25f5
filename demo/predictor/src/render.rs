// Terminal output for the demo

use colored::Colorize;
use risk_engine::{Dashboard, Insights, Notification, RiskAssessment, Severity};
use std::time::Duration;

pub fn dashboard(dashboard: &Dashboard) {
    println!("\n{}", "🛡️  Fraud Detection System".bold());
    println!("AI-powered transaction monitoring and fraud prevention dashboard\n");

    for card in &dashboard.stats {
        println!(
            "  {:<20} {:>10}   {}",
            card.title,
            card.value.bold(),
            card.change.dimmed()
        );
    }

    println!("\n{}", "📊 Model Performance Comparison".bold());
    println!(
        "  {:<20} {:>8} {:>9} {:>7} {:>7} {:>8}",
        "Model", "Accuracy", "Precision", "Recall", "F1", "ROC-AUC"
    );
    for model in &dashboard.models {
        println!(
            "  {:<20} {:>8.1} {:>9.1} {:>7.1} {:>7.1} {:>8.1}   [{}]",
            model.name,
            model.accuracy,
            model.precision,
            model.recall,
            model.f1_score,
            model.roc_auc,
            model.status
        );
    }
    if let Some(best) = dashboard.best_model() {
        println!("  Best by ROC-AUC: {}", best.name.green());
    }
    for model in &dashboard.models {
        println!("  • {}", model.insight.dimmed());
    }

    println!("\n{}", "📈 Fraud by Transaction Type".bold());
    for row in &dashboard.by_type {
        println!(
            "  {:<10} {:>6} fraud / {:>7} total   {:>6.3}%",
            row.tx_type.to_string(),
            row.fraud,
            row.total(),
            row.fraud_rate() * 100.0
        );
    }
    println!("  Total fraud: {}", dashboard.total_fraud().to_string().red());

    println!("\n{}", "💰 Amount Distribution".bold());
    for bucket in &dashboard.by_amount {
        println!(
            "  {:<10} {:>6} fraud / {:>7} legitimate   {:>6.3}%",
            bucket.range,
            bucket.fraud,
            bucket.legitimate,
            bucket.fraud_rate() * 100.0
        );
    }

    println!("\n{}", "📅 Daily Fraud Trends".bold());
    for day in &dashboard.daily {
        println!(
            "  {:<4} {:>4} fraud / {:>6} total   {:>6.3}%",
            day.day,
            day.fraud,
            day.total,
            day.fraud_rate() * 100.0
        );
    }
    if let Some(peak) = dashboard.peak_day() {
        println!("  Peak day: {}", peak.day.yellow());
    }

    insights(&dashboard.insights());
    println!();
}

fn insights(insights: &Insights) {
    println!("\n{}", "💡 Key Insights".bold());
    for share in &insights.fraud_share_by_type {
        println!(
            "  {:>6.1}%  Fraud in {}",
            share.share * 100.0,
            share.tx_type
        );
    }
    println!(
        "  {:>6.2}%  Overall Fraud Rate",
        insights.overall_fraud_rate * 100.0
    );
    println!("  {:>7}  Avg Fraud Amount", insights.avg_fraud_amount);
    for note in &insights.notes {
        println!("  • {}", note);
    }
}

pub fn analyzing(latency: Duration) {
    if !latency.is_zero() {
        println!("⏳ Analyzing Transaction... ({} ms)", latency.as_millis());
    }
}

pub fn notification(notice: &Notification) {
    let title = match notice.severity {
        Severity::Destructive => notice.title.red().bold(),
        Severity::Default => notice.title.green().bold(),
    };
    println!("🔔 {}: {}", title, notice.description);
}

pub fn assessment(assessment: &RiskAssessment) {
    let headline = if assessment.is_fraud() {
        "🚨 FRAUD DETECTED".red().bold()
    } else {
        "✅ LEGITIMATE TRANSACTION".green().bold()
    };

    println!("\n{}", headline);
    println!(
        "   Confidence: {:.1}% | Risk Score: {}",
        assessment.confidence, assessment.risk_score
    );

    println!("   Analysis Factors:");
    for factor in &assessment.factors {
        println!("     • {}", factor);
    }

    let actions = assessment.recommended_actions();
    if !actions.is_empty() {
        println!("   {}", "Recommended Actions:".red());
        for action in actions {
            println!("     • {}", action);
        }
    }
    println!();
}
