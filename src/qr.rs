//! QR entry-point images, rendered as SVG data URLs.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::QrCode;

/// Encode `payload` as a QR image and return a
/// `data:image/svg+xml;base64,...` URL usable directly in an `<img>` tag.
pub fn data_url(payload: &str) -> Result<String, QrError> {
    let code = QrCode::new(payload.as_bytes())?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .build();
    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image)
    ))
}
