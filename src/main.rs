fn main() -> anyhow::Result<()> {
    pi_transcript::cli::run()
}
