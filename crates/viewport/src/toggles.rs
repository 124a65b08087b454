use bevy::prelude::*;

/// The two user-facing display switches of the crater view.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewToggles {
    pub show_water: bool,
    pub show_wireframe: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            show_water: true,
            show_wireframe: false,
        }
    }
}

impl ViewToggles {
    pub fn set_show_water(&mut self, show: bool) {
        self.show_water = show;
    }

    pub fn set_show_wireframe(&mut self, show: bool) {
        self.show_wireframe = show;
    }

    pub fn toggle_water(&mut self) {
        self.show_water = !self.show_water;
    }

    pub fn toggle_wireframe(&mut self) {
        self.show_wireframe = !self.show_wireframe;
    }
}
