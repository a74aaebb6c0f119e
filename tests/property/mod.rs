mod week_properties;
