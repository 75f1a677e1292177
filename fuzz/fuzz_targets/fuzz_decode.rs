#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // None of these may panic or abort on allocation, whatever the input
    let _ = bmpfx::decode(data, enough::Unstoppable);
    let _ = bmpfx::DecodeRequest::new(data)
        .with_strictness(bmpfx::Strictness::Permissive)
        .decode(enough::Unstoppable);
    let _ = bmpfx::ImageInfo::from_bytes(data);
});
