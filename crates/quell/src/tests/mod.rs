mod map_store;
