//! Runs one rebuild cycle over a synthetic image pair and prints the
//! properties report and overlap result.

use slidereg_geometry::{Point2, Rect, Size2, SrtTransform};
use slidereg_pipeline::{
    assign_roles, properties::ImageMetadata, report, CancelToken, ColorModel, PipelineController,
    PipelineInputs, PixelType,
};

fn metadata(location: &str, translation: Point2, dims: (u32, u32)) -> ImageMetadata {
    ImageMetadata {
        location: location.into(),
        placement: SrtTransform {
            translation,
            ..SrtTransform::identity()
        },
        intrinsic_pixel_size: Some(Size2::new(0.5, 0.5)),
        override_pixel_spacing: None,
        pixel_dims: dims,
        level_count: 3,
        color_model: ColorModel::Rgb,
        pixel_type: PixelType::Uint8,
        opacity: 1.0,
        visibility: true,
    }
}

fn main() {
    env_logger::init();

    let images = vec![
        slidereg_pipeline::ImageProperties::from_metadata(metadata(
            "source.tif",
            Point2::default(),
            (4096, 4096),
        )),
        slidereg_pipeline::ImageProperties::from_metadata(metadata(
            "mask.tif",
            Point2::new(256.0, 128.0),
            (2048, 2048),
        )),
    ];
    let pair = assign_roles(images, "source.tif".as_ref()).expect("two images loaded");

    println!("Source image properties:");
    println!("{}", report::properties_report(pair.source()));
    println!("Mask image properties:");
    println!("{}", report::properties_report(pair.mask()));

    let inputs = PipelineInputs {
        display_region: Rect::new(0.0, 0.0, 1024.0, 1024.0),
        images: pair,
        mask_threshold: 20.0,
        cropped_output: None,
        masked_output: None,
    };

    let mut controller = PipelineController::new();
    let cancel = CancelToken::new();
    if let Some(state) = controller.run(&inputs, "native-factory", |_, roi| {
        println!("constraining processing to {roi}");
        "constrained-factory"
    }, &cancel)
    {
        println!("pipeline changed: {}", state.changed);
        println!("intersection: {}", state.intersection);
        let pixels = report::estimate_output_pixels(&state.intersection);
        println!(
            "estimated output: {} pixels ({})",
            pixels,
            report::estimate_storage_size(pixels)
        );
    }
}
