//! 汇总显示模块
//!
//! 交互结束后以及 `--check` 模式下的终端输出。

use crate::campaign::results::CampaignSummary;
use crate::campaign::{CampaignFormData, WizardStep, can_advance};
use crate::tui::state::TuiResult;
use rust_i18n::t;
use std::path::Path;

fn print_field(label: &str, value: &str) {
    let value = if value.is_empty() { "-" } else { value };
    println!("    {:<22} {}", format!("{}:", label), value);
}

/// 打印活动摘要
pub fn display_campaign(form: &CampaignFormData) {
    let summary = CampaignSummary::from_form(form);

    println!("  {}", t!("summary_title"));
    println!("  {}", "─".repeat(40));
    print_field(&t!("field_objective"), &summary.objective);
    print_field(&t!("field_budget_amount"), &summary.budget);
    print_field(&t!("field_audience_gender"), summary.audience_gender);
    print_field(&t!("summary_audience_location"), &summary.audience_location);
    print_field(
        &t!("summary_influencer_location"),
        &summary.influencer_location,
    );
    print_field(&t!("field_audience_age"), &summary.age_groups.join(", "));
    print_field(
        &t!("field_influencer_type"),
        &summary.influencer_types.join(", "),
    );
    print_field(&t!("summary_keywords"), &summary.keywords.join(" "));
    print_field(&t!("summary_categories"), &summary.categories.join(", "));
}

/// 交互结束后的摘要
pub fn display_summary(result: &TuiResult, submit_target: Option<&Path>) {
    println!("\n{}", "═".repeat(60));
    if result.submitted {
        println!("{:^60}", t!("submitted_title"));
    } else {
        println!("{:^60}", t!("wizard_cancelled"));
    }
    println!("{}", "═".repeat(60));

    println!();
    display_campaign(&result.form);

    if result.submitted {
        if let Some(path) = submit_target {
            println!("\n  {} {}", t!("submitted_saved_to"), path.display());
        }
    }

    println!("\n{}", "═".repeat(60));
}

/// 逐步打印检查结果，返回是否全部通过
pub fn display_check(form: &CampaignFormData) -> bool {
    let mut all_ready = true;
    println!();
    display_campaign(form);
    println!();

    for step in WizardStep::ALL {
        let ready = can_advance(form, step);
        all_ready &= ready;
        let mark = if ready { "✓" } else { "✗" };
        let status = if ready {
            t!("check_ready")
        } else {
            t!("check_blocked")
        };
        println!("    {} {:<28} {}", mark, t!(step.title_key()), status);
    }
    all_ready
}
