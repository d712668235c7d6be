//! Dashboard tests over the assembled in-memory container.

use std::time::Duration;

use constructpro::config::Config;
use constructpro::domain::{FileRef, NewProject, ProjectStatus};
use constructpro::generators::default_quote;
use constructpro::services::{ServiceContainer, Services};

fn container() -> Services {
    Services::in_memory(Config {
        data_dir: "./data".into(),
        analysis_step_delay: Duration::from_millis(1),
    })
    .unwrap()
}

fn input(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: "d".to_string(),
        location: "l".to_string(),
        budget: Some(100_000.0),
        files: vec![FileRef {
            name: "a.pdf".to_string(),
            size: 1,
            kind: "application/pdf".to_string(),
        }],
    }
}

#[tokio::test]
async fn dashboards_partition_projects_by_role() {
    let services = container();
    let workflow = services.workflow();
    let dashboards = services.dashboards();
    let session = services.session();

    let architect = session
        .login("sarah.architect@designstudio.com", "architect123")
        .await
        .unwrap();
    let contractor = session
        .login("john.builder@buildright.com", "contractor123")
        .await
        .unwrap();
    let client = session
        .login("david.developer@greenfield.com", "client123")
        .await
        .unwrap();

    let analysis = workflow.analyze(&input("A")).join().await.unwrap();
    let a = workflow
        .create_project(&architect, input("A"), analysis.clone())
        .await
        .unwrap();
    let b = workflow
        .create_project(&architect, input("B"), analysis)
        .await
        .unwrap();

    // Both projects sit in contractor review
    assert_eq!(dashboards.projects_for_role(&architect).await.unwrap().len(), 2);
    assert_eq!(
        dashboards.projects_for_role(&contractor).await.unwrap().len(),
        2
    );
    assert_eq!(dashboards.projects_for_role(&client).await.unwrap().len(), 2);

    // Quote one and approve it; the contractor still sees the quoted one
    workflow.submit_quote(&a.id, default_quote()).await.unwrap();
    workflow.approve(&a.id).await.unwrap();

    let contractor_view = dashboards.projects_for_role(&contractor).await.unwrap();
    assert_eq!(contractor_view.len(), 2);
    assert!(contractor_view
        .iter()
        .any(|p| p.id == a.id && p.status == ProjectStatus::Approved));
    assert!(contractor_view
        .iter()
        .any(|p| p.id == b.id && p.status == ProjectStatus::ContractorReview));
}

#[tokio::test]
async fn stats_follow_the_pipeline() {
    let services = container();
    let workflow = services.workflow();
    let dashboards = services.dashboards();

    let architect = services
        .session()
        .login("sarah.architect@designstudio.com", "architect123")
        .await
        .unwrap();

    let analysis = workflow.analyze(&input("A")).join().await.unwrap();
    let a = workflow
        .create_project(&architect, input("A"), analysis.clone())
        .await
        .unwrap();
    workflow
        .create_project(&architect, input("B"), analysis)
        .await
        .unwrap();

    // Nothing quoted or approved yet
    let sales = dashboards.sales_stats().await.unwrap();
    assert_eq!(sales.approved_orders, 0);
    assert_eq!(sales.total_sales, 0.0);
    assert_eq!(sales.avg_order_value, 0.0);

    workflow.submit_quote(&a.id, default_quote()).await.unwrap();
    let contractor = dashboards.contractor_stats().await.unwrap();
    assert_eq!(contractor.open_reviews, 1);
    assert_eq!(contractor.quoted, 1);
    assert_eq!(contractor.total_quoted_value, 346_500.0);

    workflow.approve(&a.id).await.unwrap();
    let sales = dashboards.sales_stats().await.unwrap();
    assert_eq!(sales.approved_orders, 1);
    assert_eq!(sales.total_sales, 287_500.0);
    assert_eq!(sales.avg_order_value, 287_500.0);
    assert_eq!(sales.active_pos, 1);

    let architect_stats = dashboards.architect_stats(&architect.id).await.unwrap();
    assert_eq!(architect_stats.total_projects, 2);
    assert_eq!(architect_stats.approved, 1);
    assert_eq!(architect_stats.in_review, 1);
    assert_eq!(architect_stats.total_budget, 200_000.0);

    let portfolio = dashboards.portfolio_stats().await.unwrap();
    assert_eq!(portfolio.total_projects, 2);
    assert_eq!(portfolio.active_projects, 1);
}
