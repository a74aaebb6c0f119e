mod date_label_tests;
mod schedule_item_json_tests;
