mod pizza;
mod restaurant;
