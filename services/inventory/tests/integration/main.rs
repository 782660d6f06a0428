mod db_test;
mod helpers;
mod user_test;
