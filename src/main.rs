use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use procboard::allocator::SequentialAllocator;
use procboard::cli::CliArgs;
use procboard::config::BoardConfig;
use procboard::model::BoardModel;
use procboard::runtime::App;
use procboard::scenario::Scenario;
use procboard::view::render_board;

fn main() -> Result<()> {
    procboard::tracing::init();

    let config = BoardConfig::load();
    let startup = CliArgs::parse().into_config(&config);
    tracing::debug!(?startup, "starting");

    if startup.save_config {
        startup.board_config().save().map_err(anyhow::Error::msg)?;
    }

    let allocator = Arc::new(SequentialAllocator::starting_at(startup.first_id));
    let mut app = App::new(BoardModel::new(startup.mode), allocator);

    if let Some(path) = &startup.scenario {
        let scenario = Scenario::load(path)?;
        scenario.run(&mut app, |index, step, model| {
            if startup.trace {
                println!("# step {}: {:?}", index + 1, step);
                print!("{}", render_board(model));
                println!();
            }
        })?;
    }

    print!("{}", render_board(app.model()));
    Ok(())
}
