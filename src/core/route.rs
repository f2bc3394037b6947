#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Sales,
    Inventory,
    Insights,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 3] = [Route::Sales, Route::Inventory, Route::Insights];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Sales => "Sales Dashboard",
            Route::Inventory => "Inventory Management",
            Route::Insights => "Executive Insights",
        }
    }

    pub fn from_label(label: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.label() == label)
    }

    pub fn position(&self) -> u16 {
        match self {
            Route::Sales => 0,
            Route::Inventory => 1,
            Route::Insights => 2,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Sales => "utilities-system-monitor-symbolic",
            Route::Inventory => "package-x-generic-symbolic",
            Route::Insights => "dialog-information-symbolic",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_label(route.label()), Some(route));
        }
        assert_eq!(Route::from_label("Settings"), None);
    }

    #[test]
    fn positions_follow_sidebar_order() {
        for (i, route) in Route::ALL.iter().enumerate() {
            assert_eq!(usize::from(route.position()), i);
        }
    }
}
