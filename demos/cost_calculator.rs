//! 生產成本計算示例

use prodcost::export::export_snapshot;
use prodcost::model::display::{format_currency, format_percent};
use prodcost::model::DisplayConfig;
use prodcost::{CostSession, ExportConfig, ExportFormat, LineEdit, LineId, Unit};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== 生產成本計算示例 ===\n");

    let mut session = CostSession::default();
    let display = DisplayConfig::default();

    // 第一筆原料：布料
    let fabric = LineId(1);
    session.update_line(fabric, LineEdit::Name("Kain Katun".to_string()))?;
    session.update_line(fabric, LineEdit::UnitPrice("10000".to_string()))?;
    session.update_line(fabric, LineEdit::QuantityPerItem("3".to_string()))?;
    session.update_line(fabric, LineEdit::TotalPurchased("6".to_string()))?;

    // 第二筆原料：鈕扣
    let buttons = session.add_line();
    session.update_line(buttons, LineEdit::Name("Kancing".to_string()))?;
    session.update_line(buttons, LineEdit::Unit(Unit::Piece))?;
    session.update_line(buttons, LineEdit::UnitPrice("500".to_string()))?;
    session.update_line(buttons, LineEdit::QuantityPerItem("4".to_string()))?;
    session.update_line(buttons, LineEdit::TotalPurchased("40".to_string()))?;

    println!("原料清單:");
    for line in session.lines() {
        println!(
            "  - {}: {} × {} {}，購買 {} {}",
            line.name,
            format_currency(line.unit_price_input().or_zero(), &display),
            line.quantity_per_item,
            line.unit,
            line.total_purchased,
            line.unit
        );
    }

    let json = session.snapshot().to_json()?;
    tracing::debug!("快照: {}", json);

    println!("\n可生產上限: {:?}", session.overall_cap());
    println!("生產總數（自動帶入）: {}", session.total_items());
    println!(
        "單件成本: {}",
        format_currency(session.cost_per_item(), &display)
    );

    // 以利潤百分比定價
    session.set_profit_percent("25");
    println!(
        "\n利潤 {} → 售價 {}",
        format_percent(session.profit_percent(), 1),
        session.selling_price()
    );

    // 改以售價定價
    session.set_selling_price("50000");
    println!(
        "售價 {} → 利潤 {}",
        session.selling_price(),
        format_percent(session.profit_percent(), 1)
    );

    let summary = session.summary();
    println!("\n彙總:");
    println!("  總成本: {}", format_currency(summary.total_cost, &display));
    println!("  總營收: {}", format_currency(summary.revenue, &display));
    println!("  淨利: {}", format_currency(summary.profit, &display));
    println!("  每件利潤: {}", format_currency(summary.profit_per_item, &display));
    println!("  利潤率: {}%", summary.profit_margin.round_dp(1));

    // 匯出到暫存目錄
    let dir = std::env::temp_dir();
    let config = ExportConfig::default();
    let snapshot = session.snapshot();
    for format in [ExportFormat::Csv, ExportFormat::Xlsx] {
        let path = export_snapshot(&snapshot, format, &dir, &config)?;
        tracing::info!("示例匯出 {:?}: {}", format, path.display());
    }

    Ok(())
}
