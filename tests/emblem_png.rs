use adinkra::{rasterize, write_png, Emblem, RenderingOpts};
use tempfile::tempdir;

/// Run the whole pipeline into a scratch directory and check the written file the way a consumer
/// would: it must exist, be a decodable square PNG and carry the 300 DPI density metadata.
#[test]
fn pipeline_writes_a_square_png_with_dpi_metadata() {
    let td = tempdir().unwrap();
    let path = td.path().join("adinkra.png");

    let emblem = Emblem::new();
    let opts = RenderingOpts::default();
    let pixmap = rasterize(&emblem.image(&opts), &opts, 1000.0).expect("rasterize should succeed");
    write_png(&pixmap, &path, 300).expect("write should succeed");

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoder = png::Decoder::new(std::fs::File::open(&path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf).unwrap();
    assert_eq!(frame.width, frame.height);

    let pixel_dims = reader.info().pixel_dims.expect("pHYs chunk should be present");
    assert!(matches!(pixel_dims.unit, png::Unit::Meter));
    assert_eq!(pixel_dims.xppu, 11811); // 300 DPI in pixels per meter
    assert_eq!(pixel_dims.yppu, 11811);
}

#[test]
fn repeated_renders_have_identical_pixels() {
    let emblem = Emblem::new();
    let opts = RenderingOpts::default();
    let first = rasterize(&emblem.image(&opts), &opts, 1000.0).unwrap();
    let second = rasterize(&emblem.image(&opts), &opts, 1000.0).unwrap();
    assert_eq!(first.data(), second.data());
}
