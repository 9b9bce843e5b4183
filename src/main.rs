// ==========================================
// 产品库存看板 - 命令行外壳
// ==========================================
// 用法: product-dashboard [--template] [--export] [文件...]
// 将参数中的 CSV/Excel 文件依次导入, 打印导入摘要、
// 汇总统计与缺省投影; --export 追加全量导出
// ==========================================

use anyhow::Result;
use product_dashboard::{
    logging, DashboardApi, DashboardConfig, ImportApi, ProductRepository, ViewState,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = DashboardConfig::load();
    let repo = Arc::new(ProductRepository::with_sample_data());
    let import_api = ImportApi::new(repo.clone(), config.clone());
    let dashboard = DashboardApi::new(repo, config.clone());

    let mut export_requested = false;
    let mut files = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--export" => export_requested = true,
            "--template" => {
                let path = import_api.download_template()?;
                println!("模板已生成: {}", path.display());
            }
            _ => files.push(arg),
        }
    }

    for file in &files {
        match import_api.submit_import(file).await {
            Ok(report) => {
                println!(
                    "{}: 共 {} 行, 成功 {}, 失败 {} ({} ms)",
                    file,
                    report.batch.total_rows,
                    report.batch.success_rows,
                    report.batch.failed_rows,
                    report.batch.elapsed_ms,
                );
                let (preview, remainder) =
                    report.result.failure_preview(config.failure_preview_limit);
                for failure in preview {
                    println!("  行 {}: {}", failure.row, failure.error);
                }
                if remainder > 0 {
                    println!("  ... 另有 {} 行失败", remainder);
                }
            }
            Err(e) => eprintln!("{}: 导入失败: {}", file, e),
        }
    }

    let stats = dashboard.stats()?;
    println!(
        "产品总数 {} | 在库 {} | 低库存 {} | 缺货 {} | 总价值 {:.2}",
        stats.total, stats.in_stock, stats.low_stock, stats.out_of_stock, stats.total_value,
    );

    let view = dashboard.project(&ViewState::default())?;
    for product in &view.rows {
        println!(
            "{:<10} {:<24} {:<14} {:>10.2}  {}",
            product.id, product.name, product.brand, product.price, product.availability,
        );
    }

    if export_requested {
        let (path, rows) = dashboard.export_all()?;
        println!("已导出 {} 行到 {}", rows, path.display());
    }

    Ok(())
}
