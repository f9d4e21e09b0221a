fn main() {
    yew_image_drop_viewer::start();
}
