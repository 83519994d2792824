fn main() -> Result<(), anyhow::Error> {
    trailblazer::driver()
}
