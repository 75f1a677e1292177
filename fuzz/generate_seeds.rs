#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: u32, height: u32, pixel: [u8; 3]) -> Vec<u8> {
    let pad = ((4 - (width * 3) % 4) % 4) as usize;
    let size = 54 + (width * height * 3) as usize + pad * height as usize;
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&(size as u32).to_le_bytes());
    out[10..14].copy_from_slice(&54u32.to_le_bytes());
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&(width as i32).to_le_bytes());
    out[22..26].copy_from_slice(&(height as i32).to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes());
    out[28..30].copy_from_slice(&24u16.to_le_bytes());
    for _ in 0..height {
        for _ in 0..width {
            out.extend_from_slice(&pixel);
        }
        out.extend(std::iter::repeat_n(0, pad));
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, [0xff, 0, 0])).unwrap();
    fs::write(format!("{dir}/bmp_3x2.bmp"), bmp(3, 2, [0x10, 0x80, 0xf0])).unwrap();
    fs::write(format!("{dir}/bmp_4x4.bmp"), bmp(4, 4, [0, 0, 0xff])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    let mut headers_only = bmp(2, 2, [1, 2, 3]);
    headers_only.truncate(54);
    fs::write(format!("{dir}/bmp_headers_only.bin"), headers_only).unwrap();
    let mut bpp32 = bmp(1, 1, [1, 2, 3]);
    bpp32[28] = 32;
    fs::write(format!("{dir}/bmp_32bpp.bin"), bpp32).unwrap();

    let dir = "fuzz/corpus/fuzz_filters";
    fs::create_dir_all(dir).unwrap();
    fs::write(format!("{dir}/chain.txt"), b"\x08\x06-crop 5 4 -gs -blur 0.8 -edge 0.3").unwrap();
    fs::write(format!("{dir}/unknown.txt"), b"\x03\x03-foo 1 2 -neg -sharp -thermo").unwrap();

    println!("Generated seed corpus in fuzz/corpus/");
}
