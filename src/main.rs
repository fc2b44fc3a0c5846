use nalgebra::Point2;
use slide3d_fit::{Quad, SettingsFinder};

fn main() {
    env_logger::init();

    // Demo: four corners on the slide and the pixel size of the image to fit.
    let target = Quad::new(
        Point2::new(1.94, 1.82),
        Point2::new(6.62, 0.4),
        Point2::new(7.54, 3.85),
        Point2::new(2.95, 5.45),
    );
    let (rect_w, rect_h) = (1440.0, 900.0);

    println!(
        "Searching for the optimal 3D settings for transforming a rectangle into a quadrilateral defined by the following 4 points: {target}"
    );

    let finder = SettingsFinder::default();
    match finder.find(&target, rect_w, rect_h) {
        Ok(settings) => println!("Found shape settings:\n{settings}"),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
