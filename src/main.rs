use loadburst::error::AppResult;

fn main() -> AppResult<()> {
    loadburst::entry::run()
}
