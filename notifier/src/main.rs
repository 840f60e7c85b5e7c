mod error;
mod handler;
mod models;

use lambda_runtime::{run, service_fn, Error};

use crate::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    shared::observability::init_lambda_logging("notifier")?;

    run(service_fn(function_handler)).await
}
