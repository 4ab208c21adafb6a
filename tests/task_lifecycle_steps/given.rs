//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskApiWorld;
use axum::http::StatusCode;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use serde_json::json;

#[given("an empty task service")]
fn empty_task_service(world: &mut TaskApiWorld) {
    world.task_id = None;
    world.last_response = None;
}

#[given(r#"a task titled "{title}" exists"#)]
fn task_exists(world: &mut TaskApiWorld, title: String) -> Result<(), eyre::Report> {
    world
        .send("POST", "/api/v1/tasks", Some(&json!({ "title": title })))
        .wrap_err("create task in scenario setup")?;
    let (status, body) = world.response()?;
    if *status != StatusCode::CREATED {
        return Err(eyre::eyre!("setup create returned {status}: {body}"));
    }
    world.task_id = body["id"].as_str().map(str::to_owned);
    Ok(())
}
