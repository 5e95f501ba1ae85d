mod card;
mod nav_icon;
mod profile_modal;
mod top_nav;

pub use card::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, DashboardCard, Field,
    PageHeader,
};
pub use nav_icon::NavIconView;
pub use profile_modal::ProfileModal;
pub use top_nav::TopNav;
