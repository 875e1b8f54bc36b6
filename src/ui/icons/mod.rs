use eframe::egui::IconData;
use image::{ImageBuffer, Rgba};

// Icône générée : moitié blanche pointillée, moitié noire quadrillée
pub fn create_app_icon(size: u32) -> IconData {
    let size = size.max(8);
    let cell = (size / 4).max(2);
    let mut img = ImageBuffer::<Rgba<u8>, Vec<u8>>::new(size, size);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let light = x < size / 2;
        *pixel = if light {
            // Points au centre de chaque cellule
            let on_dot = x % cell == cell / 2 && y % cell == cell / 2;
            if on_dot {
                Rgba([0x3c, 0x3c, 0x3c, 255])
            } else {
                Rgba([255, 255, 255, 255])
            }
        } else {
            let on_line = x % cell == cell / 2 || y % cell == cell / 2;
            if on_line {
                Rgba([0x24, 0x24, 0x24, 255])
            } else {
                Rgba([0, 0, 0, 255])
            }
        };
    }

    IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}
