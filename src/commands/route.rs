use serde::Serialize;

use crate::output;
use crate::router::Router;

#[derive(Serialize)]
struct Resolution<'a> {
    path: &'a str,
    view: Option<&'static str>,
}

pub fn run(router: &Router, path: &str) {
    let resolution = Resolution {
        path,
        view: router.resolve(path).map(|view| view.name()),
    };

    output::print_item(&resolution, |r| match r.view {
        Some(view) => println!("{} -> {view}", r.path),
        None => println!("{} -> no route", r.path),
    });
}
