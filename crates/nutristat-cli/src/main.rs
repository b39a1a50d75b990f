mod command;
mod figure;
mod report;
mod viewer;

fn main() -> anyhow::Result<()> {
    command::run()
}
