//! Example: Basic usage of the dySTYLE engine

use dystyle_engine::{compile_html, Config};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>dySTYLE</title></head>
<body>
  <div class="lcsBackgroundColor_red lcsPaddingY_1rem.2rem">Hello</div>
  <ul class="lcsChildrenNotFirst_BPE_Content_none"><li>a</li><li>b</li></ul>
  <p class="lcsMQMaxWidth600PX_Display_none">Wide screens only</p>
</body>
</html>"#;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    dystyle_engine::init_logging();

    let output = compile_html(PAGE, &Config::default())?;

    println!("dySTYLE Engine v{}", dystyle_engine::VERSION);
    println!("{} rules from {} elements", output.report.emitted, output.report.elements_scanned);
    println!();
    println!("{}", output.css);
    println!();
    println!("{}", output.html);
    Ok(())
}
