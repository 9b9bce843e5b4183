// ==========================================
// 并发导入控制测试
// ==========================================
// 测试目标: 同一仓储同一时刻至多一次导入在途,
//           并发提交串行完成且合并结果完整
// ==========================================


use product_dashboard::{DashboardConfig, ImportApi, ProductRepository};
use std::sync::Arc;
use test_helpers::write_temp_csv;

#[tokio::test]
async fn test_concurrent_submits_serialize_and_both_complete() {
    let repo = Arc::new(ProductRepository::new());
    let api = Arc::new(ImportApi::new(repo.clone(), DashboardConfig::default()));

    let file_a = write_temp_csv(
        "id,name,price,brand\nA1,Widget,1,Acme\nA2,Widget,2,Acme\nA3,Widget,3,Acme\n",
    );
    let file_b = write_temp_csv("id,name,price,brand\nB1,Gadget,4,Bolt\nB2,Gadget,5,Bolt\n");

    let (report_a, report_b) = tokio::join!(
        api.submit_import(file_a.path()),
        api.submit_import(file_b.path()),
    );

    assert_eq!(report_a.unwrap().batch.success_rows, 3);
    assert_eq!(report_b.unwrap().batch.success_rows, 2);

    // 两批全部落库, 批内顺序保持
    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 5);
    let a_ids: Vec<&str> = all
        .iter()
        .filter(|p| p.id.starts_with('A'))
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(a_ids, ["A1", "A2", "A3"]);
}

#[tokio::test]
async fn test_sequential_imports_append_in_arrival_order() {
    let repo = Arc::new(ProductRepository::new());
    let api = ImportApi::new(repo.clone(), DashboardConfig::default());

    let first = write_temp_csv("id,name,price,brand\nF1,Widget,1,Acme\n");
    let second = write_temp_csv("id,name,price,brand\nS1,Gadget,2,Bolt\n");

    api.submit_import(first.path()).await.unwrap();
    api.submit_import(second.path()).await.unwrap();

    let all = repo.list_all().unwrap();
    assert_eq!(all[0].id, "F1");
    assert_eq!(all[1].id, "S1");
}
