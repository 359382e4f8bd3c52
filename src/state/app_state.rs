//! Application state definitions

/// Current page in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Menu,
    Book,
    Contact,
}

impl View {
    pub const ALL: [View; 4] = [View::Home, View::Menu, View::Book, View::Contact];

    pub fn next(&self) -> Self {
        match self {
            Self::Home => Self::Menu,
            Self::Menu => Self::Book,
            Self::Book => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::Menu => Self::Home,
            Self::Book => Self::Menu,
            Self::Contact => Self::Book,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::Book => "Book a Table",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Menu => 1,
            Self::Book => 2,
            Self::Contact => 3,
        }
    }

    /// Whether the page hosts a data-entry form
    pub fn has_form(&self) -> bool {
        matches!(self, Self::Book | Self::Contact)
    }
}

/// A dish on the static menu page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub category: &'static str,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        name: "Classic Burger",
        description: "Juicy beef patty with fresh lettuce, tomatoes, and our special sauce",
        price: "$12.99",
        category: "Main Course",
    },
    MenuItem {
        name: "Caesar Salad",
        description: "Crisp romaine lettuce, parmesan cheese, croutons, and Caesar dressing",
        price: "$8.99",
        category: "Starters",
    },
    MenuItem {
        name: "Grilled Salmon",
        description: "Fresh Atlantic salmon with seasonal vegetables and lemon butter sauce",
        price: "$24.99",
        category: "Main Course",
    },
    MenuItem {
        name: "Chocolate Lava Cake",
        description: "Warm chocolate cake with a molten center, served with vanilla ice cream",
        price: "$7.99",
        category: "Desserts",
    },
];

/// (dish, tagline) pairs featured on the home page
pub const FAVOURITES: &[(&str, &str)] = &[
    (
        "Signature Chicken Burger",
        "Our bestselling burger with premium chicken fillet",
    ),
    ("Crispy Fries", "Golden and perfectly seasoned"),
    ("Strawberry Waffle", "Sweet and fluffy with fresh strawberries"),
    ("Family Chicken Bucket", "Perfect for sharing with family"),
];

/// Displayed next to the reservation form; none of it is enforced
pub const RESERVATION_POLICY: &[&str] = &[
    "Reservations must be made at least 24 hours in advance",
    "Please arrive within 15 minutes of your reservation time",
    "For parties of 6 or more, please call us directly",
    "Cancellations must be made 4 hours before reservation time",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        assert_eq!(View::default(), View::Home);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for view in View::ALL {
            assert_eq!(view.next().prev(), view);
        }
    }

    #[test]
    fn test_index_matches_order() {
        for (i, view) in View::ALL.iter().enumerate() {
            assert_eq!(view.index(), i);
        }
    }

    #[test]
    fn test_only_book_and_contact_have_forms() {
        let with_forms: Vec<View> = View::ALL.into_iter().filter(|v| v.has_form()).collect();
        assert_eq!(with_forms, vec![View::Book, View::Contact]);
    }

    #[test]
    fn test_menu_categories() {
        assert_eq!(MENU.len(), 4);
        assert!(MENU.iter().all(|item| item.price.starts_with('$')));
    }
}
