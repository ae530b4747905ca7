pub mod inspect_node_route;
