mod link_scenario;
