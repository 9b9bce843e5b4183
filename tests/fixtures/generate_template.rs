// ==========================================
// 上传模板生成工具
// ==========================================
// 用途: 在当前目录生成 product_template.csv, 供手工联调上传流程
// 运行: cargo run --bin generate_template
// ==========================================

use product_dashboard::export::template::{write_template, TEMPLATE_FILENAME};
use product_dashboard::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    write_template(TEMPLATE_FILENAME)?;
    println!("已生成 {}", TEMPLATE_FILENAME);

    Ok(())
}
