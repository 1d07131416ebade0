#![allow(non_snake_case)]

mod bootstrap;
mod router;
mod view;

use zino::prelude::*;

pub(crate) type App = zino::Desktop<router::Route>;

fn main() {
    App::boot()
        .register(router::Route::default())
        .add_plugin(bootstrap::init())
        .run()
}
