fn main() -> anyhow::Result<()> {
    trudy_search::cli::run()
}
