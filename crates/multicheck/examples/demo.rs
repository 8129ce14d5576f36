//! MultiCheck Demo
//!
//! Builds a control from TOML props, clicks through a few checkboxes and
//! prints the control after every click, together with what the change
//! callback received.
//!
//! Run with: cargo run -p multicheck --example demo
//! Set `RUST_LOG=multicheck=debug` to see selection and notifier logs.

use multicheck::prelude::*;
use multicheck::{TreeFormatOptions, TreeStyle};
use tracing_subscriber::EnvFilter;

const PROPS: &str = r#"
label = "Pizza toppings"
columns = 2
values = ["cheese"]

[[options]]
label = "Cheese"
value = "cheese"

[[options]]
label = "Ham"
value = "ham"

[[options]]
label = "Olives"
value = "olives"

[[options]]
label = "Mushrooms"
value = "mushrooms"

[[options]]
label = "Peppers"
value = "peppers"
"#;

fn main() -> Result<(), PropsError> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let props = MultiCheckProps::from_toml_str(PROPS)?;
    let mut control = MultiCheck::from_props(props);
    control.changed().connect(|options: &Vec<CheckOption>| {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        println!("changed -> [{}]", labels.join(", "));
    });

    let render = RenderOptions::default().with_indicator(IndicatorStyle::Unicode);
    print!("{}", control.render_text(&render));

    for click in ["Olives", "Select All", "Select All", "Ham", "Ham"] {
        println!();
        println!("click {click:?}");
        control.click_label(click);
        print!("{}", control.render_text(&render));
    }

    println!();
    let tree_options = TreeFormatOptions::default().with_style(TreeStyle::Ascii);
    print!("{}", control.debug_tree().format(&tree_options));
    Ok(())
}
