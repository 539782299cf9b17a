/// Host router the overlay hands selected paths to
///
/// The overlay only requests navigation; resolving unknown routes is the
/// implementor's business.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, href: &str) {
        self(href)
    }
}
