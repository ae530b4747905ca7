pub mod list_components_route;
