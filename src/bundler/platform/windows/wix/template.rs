//! WiX v3 source template.

/// Handlebars template for `setup_script.wxs`.
///
/// Rendered with HTML escaping, which yields valid XML attribute values.
pub const WXS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Wix xmlns="http://schemas.microsoft.com/wix/2006/wi">
  <Product Id="*" Name="{{product_name}}" Language="{{language}}" Version="{{version}}" Manufacturer="{{manufacturer}}" UpgradeCode="{{upgrade_code}}">
    <Package InstallerVersion="200" Compressed="yes" InstallScope="perMachine" />
    <Media Id="1" Cabinet="media1.cab" EmbedCab="yes" />
    <Directory Id="TARGETDIR" Name="SourceDir">
      <Directory Id="ProgramFilesFolder">
        <Directory Id="INSTALLFOLDER" Name="{{product_name}}">
{{#each components}}
          <Component Id="{{id}}" Guid="{{guid}}">
            <File Id="{{file_id}}" Source="{{source}}" KeyPath="yes" />
          </Component>
{{/each}}
        </Directory>
      </Directory>
    </Directory>
    <Feature Id="ProductFeature" Title="{{product_name}}" Level="1">
{{#each components}}
      <ComponentRef Id="{{id}}" />
{{/each}}
    </Feature>
  </Product>
</Wix>
"#;
