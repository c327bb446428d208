use anyhow::Context;

fn main() -> anyhow::Result<()> {
    m3_theme_editor::run(std::env::args().skip(1)).context("m3-theme-editor failed")
}
