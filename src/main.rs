fn main() {
    backoffice_admin::run();
}
