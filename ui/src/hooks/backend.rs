use std::rc::Rc;

use yew::prelude::*;

use crate::backend::Backend;

#[hook]
pub fn use_backend() -> Rc<Backend> {
    use_context::<Rc<Backend>>().expect("Must be nested under the backend provider")
}
