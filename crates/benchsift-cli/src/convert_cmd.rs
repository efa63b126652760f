use std::path::Path;

use benchsift::{ConvertError, export, extract, segment_text};

pub fn run(input: &Path, out_base: &str) -> Result<(), i32> {
    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        return Err(1);
    }

    eprintln!("Extracting text from '{}'...", input.display());
    let text = extract::extract_text(input).map_err(fail)?;

    let items = segment_text(&text);
    eprintln!("Extracted {} benchmark items", items.len());

    let json_path = format!("{out_base}.json");
    eprintln!("Writing '{json_path}'...");
    export::write_json(&items, Path::new(&json_path)).map_err(fail)?;

    let xlsx_path = format!("{out_base}.xlsx");
    eprintln!("Writing '{xlsx_path}'...");
    export::write_xlsx(&items, Path::new(&xlsx_path)).map_err(fail)?;

    Ok(())
}

fn fail(err: ConvertError) -> i32 {
    eprintln!("Error: {err}");
    1
}
