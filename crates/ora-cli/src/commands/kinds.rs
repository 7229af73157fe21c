use comfy_table::{ContentArrangement, Table};
use ora_core::Registry;
use ora_oracle::Generator;

pub fn run() -> Result<(), String> {
    let registry = Registry::builtin().map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Kind", "Description"]);
    for generator in Generator::all() {
        table.add_row(vec![generator.kind(), generator.about()]);
    }

    println!("{table}");
    println!();
    println!("  {} kinds registered", registry.len());

    Ok(())
}
