//! Project file fixtures

pub const USER_MODEL: &str = r#"<?php

namespace App;

use Illuminate\Foundation\Auth\User as Authenticatable;
use Illuminate\Notifications\Notifiable;

class User extends Authenticatable
{
    use Notifiable;
}
"#;

pub const ROUTES: &str = r#"<?php

use Illuminate\Support\Facades\Route;

Route::get('/', function () {
    return view('welcome');
});
"#;

pub const PACKAGE_CONFIG: &str = r#"<?php

return [
    'database' => [
        'tables' => [
            'hidden' => ['migrations', 'data_rows', 'data_types'],
        ],
    ],

    'table_prefix' => '',
];
"#;

pub const SEEDER: &str = r#"<?php

use Illuminate\Database\Seeder;

class DataTypesTableSeeder extends Seeder
{
    public function run()
    {
    }
}
"#;

pub const DUMMY_SEEDER: &str = r#"<?php
use Illuminate\Database\Seeder;

class PostsTableSeeder extends Seeder
{
    public function run()
    {
    }
}
"#;

pub const PREFIX_OVERRIDE: &str = "config(['voyager.database.table_prefix' => 'voy_']);";
