use super::ui;
use crate::core::config::AppConfig;
use crate::core::fund::FundCode;
use crate::core::sales_load::{FALLBACK_RATE, SALES_LOAD_TIERS};
use comfy_table::Cell;

fn format_bound(value: f64) -> String {
    format!("{value:.2}")
}

/// Renders the fund catalog followed by the sales load schedule.
pub fn render_catalog(config: &AppConfig) -> String {
    let currency = &config.currency;

    let mut funds = ui::new_styled_table();
    funds.set_header(vec![
        ui::header_cell("Fund"),
        ui::header_cell("Name"),
        ui::header_cell(&format!("NAVPS ({currency})")),
    ]);
    for code in FundCode::ALL {
        funds.add_row(vec![
            Cell::new(code.ticker()),
            Cell::new(code.display_name()),
            ui::number_cell(code.price_per_share().to_string()),
        ]);
    }

    let mut tiers = ui::new_styled_table();
    tiers.set_header(vec![
        ui::header_cell(&format!("Amount ({currency})")),
        ui::header_cell("Sales Load"),
    ]);
    if let Some(first) = SALES_LOAD_TIERS.first() {
        tiers.add_row(vec![
            Cell::new(format!("below {}", format_bound(first.lower))),
            ui::number_cell(ui::format_rate(FALLBACK_RATE)),
        ]);
    }
    for tier in SALES_LOAD_TIERS {
        let range = match tier.upper {
            Some(upper) => format!(
                "{} to {}",
                format_bound(tier.lower),
                format_bound(upper - 0.01)
            ),
            None => format!("{} and up", format_bound(tier.lower)),
        };
        tiers.add_row(vec![
            Cell::new(range),
            ui::number_cell(ui::format_rate(tier.rate)),
        ]);
    }

    format!(
        "{}\n{funds}\n{}\n\n{}\n{tiers}",
        ui::style_text("Funds", ui::StyleType::Title),
        ui::style_text(
            &format!("Prices updated as of {}", config.navps_as_of_label()),
            ui::StyleType::Subtle
        ),
        ui::style_text("Sales Load Schedule", ui::StyleType::Title),
    )
}

pub fn run(config: &AppConfig) {
    println!("{}", render_catalog(config));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_fund() {
        let output = render_catalog(&AppConfig::default());
        for code in FundCode::ALL {
            assert!(output.contains(code.ticker()));
            assert!(output.contains(code.display_name()));
        }
        assert!(output.contains("4.5457"));
        assert!(output.contains("NAVPS (Php)"));
    }

    #[test]
    fn test_catalog_lists_schedule() {
        let output = render_catalog(&AppConfig::default());
        assert!(output.contains("below 1000.00"));
        assert!(output.contains("1000.00 to 99999.99"));
        assert!(output.contains("2000000.00 and up"));
        assert!(output.contains("2.00%"));
        assert!(output.contains("1.50%"));
    }
}
