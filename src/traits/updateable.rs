/// Per-frame state advancement
pub trait Updateable {
    /// Advance state by `delta` seconds
    fn update(&mut self, delta: f32);
}

/// Forward one tick to every listener, in order
pub fn update_all(listeners: &mut [&mut dyn Updateable], delta: f32) {
    for listener in listeners.iter_mut() {
        listener.update(delta);
    }
}
