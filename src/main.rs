fn main() {
    aurora::run();
}
