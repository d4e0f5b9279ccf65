fn main() {
    bubble_pop::game::run();
}
