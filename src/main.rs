use adinkra::{rasterize, write_png, Emblem, RenderingOpts};

/// How many pixels one world unit spans in the output, sized to match an 8-inch figure
const PX_PER_UNIT: f32 = 1000.0;
/// Pixel density recorded in the PNG
const DPI: u32 = 300;
const OUTPUT_FILE: &str = "adinkra.png";

fn main() -> anyhow::Result<()> {
    let emblem = Emblem::new();
    let opts = RenderingOpts::default();

    let pixmap = rasterize(&emblem.image(&opts), &opts, PX_PER_UNIT)?;
    write_png(&pixmap, OUTPUT_FILE, DPI)?;

    println!("Adinkra SUSY graphic created as {}", OUTPUT_FILE);
    Ok(())
}
