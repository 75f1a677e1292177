#![no_main]
use libfuzzer_sys::fuzz_target;
use bmpfx::*;

fuzz_target!(|data: &[u8]| {
    // First two bytes pick a small image size, the rest is a filter command line
    let [w, h, rest @ ..] = data else { return };
    let (w, h) = (u32::from(*w % 16), u32::from(*h % 16));
    let Ok(text) = std::str::from_utf8(rest) else { return };

    let pixels = (0..w * h)
        .map(|i| Color::gray((i % 256) as f32 / 255.0))
        .collect();
    let Ok(mut image) = Image::from_pixels(w, h, pixels) else { return };

    let specs: Vec<FilterSpec> = parse_filter_args(text.split_whitespace())
        .into_iter()
        .filter_map(Result::ok)
        .collect();
    let report = Pipeline::default()
        .apply(&mut image, &specs, enough::Unstoppable)
        .expect("Unstoppable never cancels");
    assert_eq!(report.applied.len() + report.skipped.len(), specs.len());
    assert_eq!(image.pixels().len(), (image.width() * image.height()) as usize);
});
