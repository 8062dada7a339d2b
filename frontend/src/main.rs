fn main() {
    lexboard_frontend::boot();
}
