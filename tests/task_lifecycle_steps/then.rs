//! Then steps for task lifecycle BDD scenarios.

use super::world::TaskApiWorld;
use rstest_bdd_macros::then;

#[then("the response status is {code:u64}")]
fn response_status_is(world: &TaskApiWorld, code: u64) -> Result<(), eyre::Report> {
    let (status, body) = world.response()?;
    if u64::from(status.as_u16()) != code {
        return Err(eyre::eyre!("expected status {code}, got {status}: {body}"));
    }
    Ok(())
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskApiWorld, status: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    if body["status"] != status.as_str() {
        return Err(eyre::eyre!("expected task status {status}, got {body}"));
    }
    Ok(())
}

#[then("the response lists {count:u64} tasks")]
fn response_lists(world: &TaskApiWorld, count: u64) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    let listed = body
        .as_array()
        .ok_or_else(|| eyre::eyre!("expected a JSON array, got {body}"))?
        .len();
    if u64::try_from(listed)? != count {
        return Err(eyre::eyre!("expected {count} tasks, got {listed}"));
    }
    Ok(())
}

#[then(r#"the validation errors name the field "{field}""#)]
fn validation_names_field(world: &TaskApiWorld, field: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    if body["error"] != "Validation Failed" || !body["errors"][field.as_str()].is_string() {
        return Err(eyre::eyre!("expected a validation error on {field}, got {body}"));
    }
    Ok(())
}

#[then(r#"the error message mentions "{text}""#)]
fn error_message_mentions(world: &TaskApiWorld, text: String) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    let message = body["message"].as_str().unwrap_or_default();
    if !message.contains(&text) {
        return Err(eyre::eyre!("expected message to mention {text:?}, got {message:?}"));
    }
    Ok(())
}

#[then("the error message names the requested id")]
fn error_names_requested_id(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let (_, body) = world.response()?;
    let requested = world
        .requested_id
        .as_deref()
        .ok_or_else(|| eyre::eyre!("no id was requested"))?;
    let message = body["message"].as_str().unwrap_or_default();
    if !message.contains(requested) {
        return Err(eyre::eyre!("expected message to name {requested}, got {message:?}"));
    }
    Ok(())
}
