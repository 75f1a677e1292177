use bmpfx::*;
use enough::Unstoppable;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}

#[test]
fn bmp_roundtrip_rgb() {
    let pixels = vec![
        rgb(255, 0, 0),
        rgb(0, 255, 0),
        rgb(0, 0, 255), // row 0: R G B
        rgb(128, 128, 128),
        rgb(64, 64, 64),
        rgb(0, 0, 0), // row 1: gray dark black
    ];
    let image = Image::from_pixels(3, 2, pixels).unwrap();

    let encoded = EncodeRequest::new().encode(&image, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = DecodeRequest::new(&encoded).decode(Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, image);
}

#[test]
fn roundtrip_quantizes_to_255ths() {
    let pixels = vec![
        Color::new(0.1, 0.2, 0.3),
        Color::new(0.999, 0.5, 0.0001),
    ];
    let image = Image::from_pixels(2, 1, pixels.clone()).unwrap();
    let decoded = decode(&encode(&image, Unstoppable).unwrap(), Unstoppable).unwrap();

    for (orig, back) in pixels.iter().zip(decoded.pixels()) {
        for (o, b) in [(orig.r, back.r), (orig.g, back.g), (orig.b, back.b)] {
            // Truncation: the decoded value is the 255th at or below the original.
            assert!(b <= o + 1e-6, "{b} > {o}");
            assert!(o - b < 1.0 / 255.0 + 1e-6, "{o} - {b}");
            assert_eq!((b * 255.0).round(), b * 255.0);
        }
    }
}

#[test]
fn all_red_4x2_file_layout() {
    // Width 4 needs no padding: 4 * 3 = 12 bytes per row.
    let image = Image::from_pixels(4, 2, vec![Color::new(1.0, 0.0, 0.0); 8]).unwrap();
    let encoded = encode(&image, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 54 + 24);
    for px in encoded[54..].chunks_exact(3) {
        assert_eq!(px, &[0, 0, 255]);
    }
}

#[test]
fn header_fields_match_profile() {
    let encoded = encode(&Image::new(5, 3), Unstoppable).unwrap();
    let le32 = |at: usize| u32::from_le_bytes(encoded[at..at + 4].try_into().unwrap());
    let le16 = |at: usize| u16::from_le_bytes(encoded[at..at + 2].try_into().unwrap());

    // padding for width 5 is 1, so 54 + 45 + 3
    assert_eq!(le32(2) as usize, encoded.len());
    assert_eq!(le32(2), 102);
    assert_eq!(le32(6), 0); // both reserved fields
    assert_eq!(le32(10), 54);
    assert_eq!(le32(14), 40);
    assert_eq!(le32(18), 5);
    assert_eq!(le32(22), 3);
    assert_eq!(le16(26), 1);
    assert_eq!(le16(28), 24);
    assert!(encoded[30..54].iter().all(|&b| b == 0));
}

#[test]
fn rows_are_not_flipped() {
    let mut image = Image::new(1, 2);
    image.set(0, 0, Color::WHITE);
    let encoded = encode(&image, Unstoppable).unwrap();
    // First stored row is written first.
    assert_eq!(&encoded[54..57], &[255, 255, 255]);
    assert_eq!(&encoded[58..61], &[0, 0, 0]);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.get(0, 0), Some(Color::WHITE));
}

#[test]
fn out_of_range_channels_saturate_on_encode() {
    // Channels outside 0.0..=1.0 clamp to the nearest byte value.
    let image = Image::from_pixels(
        1,
        1,
        vec![Color::new(1.7, -0.4, 0.5)],
    )
    .unwrap();
    let encoded = encode(&image, Unstoppable).unwrap();
    assert_eq!(&encoded[54..57], &[127, 0, 255]);
}

#[test]
fn image_info_probe() {
    let encoded = encode(&Image::new(7, 2), Unstoppable).unwrap();
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 7);
    assert_eq!(info.height, 2);
    assert_eq!(info.bits_per_pixel, 24);
    assert_eq!(info.row_padding, 3);
    assert_eq!(info.encoded_size, Some(encoded.len()));
    assert_eq!(info.declared_file_size as usize, encoded.len());
    assert!(info.is_supported());
}

#[test]
fn not_a_bitmap() {
    let result = decode(b"P6\n2 2\n255\n", Unstoppable);
    match result.unwrap_err() {
        BitmapError::NotBitmap => {}
        other => panic!("expected NotBitmap, got {other:?}"),
    }
    assert_eq!(BitmapError::NotBitmap.to_string(), "not a bitmap");
}

#[test]
fn limits_reject_large() {
    let encoded = encode(&Image::new(1, 2), Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1), // only 1 pixel allowed
        ..Default::default()
    };

    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        BitmapError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

#[test]
fn file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bmp");
    let image = Image::from_pixels(2, 2, vec![Color::new(0.0, 1.0, 0.0); 4]).unwrap();

    write_file(&path, &image, Unstoppable).unwrap();
    let back = read_file(&path, Unstoppable).unwrap();
    assert_eq!(back, image);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.bmp");
    match read_file(&path, Unstoppable).unwrap_err() {
        BitmapError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn unwritable_output_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory path cannot be opened as a file for writing.
    let result = write_file(dir.path(), &Image::new(1, 1), Unstoppable);
    assert!(matches!(result, Err(BitmapError::Io { .. })));
}

#[test]
fn resolution_is_written_and_ignored_on_decode() {
    let image = Image::from_pixels(2, 1, vec![Color::WHITE, Color::BLACK]).unwrap();
    let encoded = EncodeRequest::new()
        .with_pixels_per_meter(3780, 2835)
        .encode(&image, Unstoppable)
        .unwrap();
    assert_eq!(&encoded[38..42], &3780i32.to_le_bytes());
    assert_eq!(&encoded[42..46], &2835i32.to_le_bytes());
    assert_eq!(decode(&encoded, Unstoppable).unwrap(), image);
}
